use serde::Serialize;

/// One of the institution-wide core learning outcomes
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OutcomeSeed {
    pub id: i32,
    pub label: &'static str,
    pub description: &'static str,
}

/// The fixed set of outcomes courses are mapped against.
///
/// Outcome ids are referenced by number in the spreadsheet, so they are
/// seeded explicitly rather than generated.
pub const CORE_OUTCOMES: [OutcomeSeed; 7] = [
    OutcomeSeed {
        id: 1,
        label: "Engage and take responsibility as active learners",
        description: "Students will be involved in the learning process as they gain deeper \
                      levels of understanding of the subject matter. They will design, complete \
                      and analyze projects while developing group interaction and leadership \
                      skills.",
    },
    OutcomeSeed {
        id: 2,
        label: "Think critically",
        description: "Students will develop and practice analytical skills, problem-solving \
                      skills and quantitative reasoning skills. Using creativity and \
                      self-reflection, they will be able to engage in inquiry that produces \
                      well-reasoned, meaningful conclusions.",
    },
    OutcomeSeed {
        id: 3,
        label: "Communicate effectively",
        description: "Students will develop the organizational and research skills necessary \
                      to write and speak effectively. The students will demonstrate awareness \
                      of different audiences, styles, and approaches to oral and written \
                      communication.",
    },
    OutcomeSeed {
        id: 4,
        label: "Participate in diverse environments",
        description: "Students will gain the awareness of and sensitivity to diversity, \
                      including one's own place as a global citizen. Students attain knowledge \
                      and understanding of the multiple expressions of diversity, and the \
                      skills to recognize, analyze and evaluate diverse issues and \
                      perspectives.",
    },
    OutcomeSeed {
        id: 5,
        label: "Utilize information literacy skills",
        description: "Students will develop and employ skills to recognize when information \
                      is needed and to locate, evaluate, effectively use and communicate \
                      information in its various forms.",
    },
    OutcomeSeed {
        id: 6,
        label: "Demonstrate computer and technology proficiency",
        description: "Students will use computers and technology as appropriate in their \
                      course of study.",
    },
    OutcomeSeed {
        id: 7,
        label: "Identify elements of a sustainable society",
        description: "Students will integrate and apply economic, ecological, and eco-justice \
                      concepts into a systems-thinking framework.",
    },
];
