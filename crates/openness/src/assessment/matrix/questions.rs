use super::MatrixDimension;
use serde::Serialize;

/// One selectable answer and the score it carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixOption {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixQuestion {
    pub variable_id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<MatrixOption>,
}

impl MatrixQuestion {
    /// Score of the option whose label matches, ignoring case.
    pub fn value_for(&self, label: &str) -> Option<f64> {
        let label = label.trim();
        self.options
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(label))
            .map(|option| option.value)
    }
}

fn question(
    variable_id: &'static str,
    prompt: &'static str,
    options: &[(&'static str, f64)],
) -> MatrixQuestion {
    MatrixQuestion {
        variable_id,
        prompt,
        options: options
            .iter()
            .map(|&(label, value)| MatrixOption { label, value })
            .collect(),
    }
}

/// Multiple-choice items feeding the openness axis of a dimension.
pub fn questions_for(dimension: MatrixDimension) -> Vec<MatrixQuestion> {
    match dimension {
        MatrixDimension::Engagement => engagement_questions(),
        MatrixDimension::Application => application_questions(),
        MatrixDimension::Interaction => interaction_questions(),
        MatrixDimension::Research => research_questions(),
    }
}

/// The dimension a Mode B variable id belongs to.
pub fn dimension_of(variable_id: &str) -> Option<MatrixDimension> {
    MatrixDimension::ordered().into_iter().find(|dimension| {
        questions_for(*dimension)
            .iter()
            .any(|question| question.variable_id == variable_id.trim())
    })
}

fn engagement_questions() -> Vec<MatrixQuestion> {
    vec![
        question(
            "ENG1",
            "How many distinct sectors actively participated in the project network?",
            &[
                ("5 or more sectors", 3.0),
                ("4 sectors", 2.5),
                ("3 sectors", 2.0),
                ("2 sectors", 1.5),
                ("1 or none", 1.0),
            ],
        ),
        question(
            "ENG2",
            "How many actors were actively involved in the project?",
            &[
                ("More than 5 actors", 3.0),
                ("4 actors", 2.5),
                ("3 actors", 2.0),
                ("2 actors", 1.5),
                ("1 actor or none", 1.0),
            ],
        ),
        question(
            "ENG3",
            "How would you describe the project governance?",
            &[
                ("Clear and effective governance", 3.0),
                ("Mostly effective governance", 2.5),
                ("Moderate, with issues", 2.0),
                ("Unclear or weak", 1.5),
                ("No governance", 1.0),
            ],
        ),
        question(
            "ENG4",
            "How well were ideas listened to among actors?",
            &[
                ("Consistent active listening", 3.0),
                ("Good listening capacity", 2.5),
                ("Moderate", 2.0),
                ("Limited", 1.5),
                ("No listening", 1.0),
            ],
        ),
        question(
            "ENG5",
            "How did the project adapt to changes?",
            &[
                ("High adaptability", 3.0),
                ("Good adaptation", 2.5),
                ("Moderate", 2.0),
                ("Limited", 1.5),
                ("None", 1.0),
            ],
        ),
        question(
            "ENG6",
            "How did the project respond to unexpected challenges?",
            &[
                ("Immediate and effective response", 3.0),
                ("Generally fast", 2.5),
                ("Moderate", 2.0),
                ("Slow and not effective", 1.5),
                ("No response", 1.0),
            ],
        ),
    ]
}

fn application_questions() -> Vec<MatrixQuestion> {
    vec![
        question(
            "APP1",
            "How accessible is the generated knowledge?",
            &[
                ("Free and unrestricted", 3.0),
                ("Mostly free", 2.5),
                ("With significant restrictions", 2.0),
                ("Only with specific permissions", 1.5),
                ("Closed", 1.0),
            ],
        ),
        question(
            "APP2",
            "Is the use, modification or redistribution allowed and facilitated?",
            &[
                ("No restrictions", 3.0),
                ("Minor restrictions", 2.5),
                ("Significant restrictions", 2.0),
                ("Use only, no modification", 1.5),
                ("Not allowed", 1.0),
            ],
        ),
        question(
            "APP3",
            "How did actors participate in the solution design?",
            &[
                ("Participation in all stages", 3.0),
                ("Frequent, structured participation", 2.5),
                ("Moderate with partial structure", 2.0),
                ("Minimal with weak structure", 1.5),
                ("No participation", 1.0),
            ],
        ),
    ]
}

fn interaction_questions() -> Vec<MatrixQuestion> {
    vec![
        question(
            "INF1",
            "What level of trust and transparency existed among partners?",
            &[
                ("High trust and clear transparency", 3.0),
                ("Generally good", 2.5),
                ("Moderate", 2.0),
                ("Low trust or opaque", 1.5),
                ("No trust/opaque", 1.0),
            ],
        ),
        question(
            "INF2",
            "How would you describe shared resources, rules, and tools?",
            &[
                ("Shared; explicit rules; common toolset", 3.0),
                ("Mostly shared; some explicit rules", 2.5),
                ("Partially shared", 2.0),
                ("Sparsely shared; weak rules", 1.5),
                ("No shared resources/rules", 1.0),
            ],
        ),
        question(
            "INF3",
            "How would you describe the coordination mechanisms?",
            &[
                ("Formalized and effective", 3.0),
                ("Mostly formalized", 2.5),
                ("Moderate", 2.0),
                ("Sparsely formalized", 1.5),
                ("No formal coordination", 1.0),
            ],
        ),
    ]
}

fn research_questions() -> Vec<MatrixQuestion> {
    vec![
        question(
            "RES1",
            "How structured was participation in the research process?",
            &[
                ("Broad and structured", 3.0),
                ("Structured but not constant", 2.5),
                ("Moderate", 2.0),
                ("Limited", 1.5),
                ("None", 1.0),
            ],
        ),
        question(
            "RES2",
            "How were contributions recognized in the research process?",
            &[
                ("Formal and explicit recognition", 3.0),
                ("Present but not systematic", 2.5),
                ("Occasional", 2.0),
                ("Minimal", 1.5),
                ("No recognition", 1.0),
            ],
        ),
        question(
            "RES3",
            "Was there a clear strategy for open research?",
            &[
                ("Fully defined and implemented", 3.0),
                ("Mostly defined", 2.5),
                ("Partially developed", 2.0),
                ("Weak strategy", 1.5),
                ("No strategy", 1.0),
            ],
        ),
    ]
}
