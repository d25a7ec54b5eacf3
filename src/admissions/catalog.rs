use serde::Serialize;

/// Course offered through the portal. Fees are displayed only; they do not
/// feed the revenue aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub code: &'static str,
    pub college: &'static str,
    pub duration: &'static str,
    pub fees: u64,
    pub seats: u32,
}

/// Static course catalog shown on the public pages and in the course
/// selection step of the submission workflow.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "c1",
            title: "B.Sc. Nursing",
            code: "NUR-101",
            college: "City Medical Institute",
            duration: "4 Years",
            fees: 450_000,
            seats: 60,
        },
        Course {
            id: "c2",
            title: "Computer Science Engineering",
            code: "CSE-404",
            college: "Tech Valley University",
            duration: "4 Years",
            fees: 600_000,
            seats: 120,
        },
        Course {
            id: "c3",
            title: "Master of Business Administration",
            code: "MBA-202",
            college: "Global School of Business",
            duration: "2 Years",
            fees: 800_000,
            seats: 45,
        },
        Course {
            id: "c4",
            title: "Diploma in Pharmacy",
            code: "DPH-102",
            college: "City Medical Institute",
            duration: "2 Years",
            fees: 250_000,
            seats: 30,
        },
    ]
}
