//! Catalog command handler

use diploma_planner::core::models::CourseType;
use diploma_planner::core::Catalog;
use logger::verbose;

/// List catalog courses grouped by type
pub fn run(catalog: &Catalog) {
    println!("\n=== {} ({} courses) ===", catalog.name, catalog.len());

    for course_type in [CourseType::Programming, CourseType::DataScience, CourseType::Both] {
        let courses: Vec<_> = catalog
            .courses()
            .iter()
            .filter(|c| c.course_type == course_type)
            .collect();
        if courses.is_empty() {
            continue;
        }

        let credits: u32 = courses.iter().map(|c| c.credits).sum();
        println!("\n--- {course_type} ({credits} cr) ---");
        for course in courses {
            let mut flags = Vec::new();
            if course.has_oppe {
                flags.push("OPPE");
            }
            if course.has_quiz {
                flags.push("Quiz");
            }
            if course.is_project {
                flags.push("Project");
            }
            if course.optional {
                flags.push("elective");
            }
            println!(
                "  {:<10} {:<14} {} cr  {}  [{}]",
                course.code,
                course.id,
                course.credits,
                course.name,
                flags.join(", ")
            );
            verbose!("             {}", course.description);
        }
    }
}
