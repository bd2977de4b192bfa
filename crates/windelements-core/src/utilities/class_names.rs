//! Class-name composition, the model the emitted `cn` helper follows

/// One argument to the class-name composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassInput<'a> {
    /// Included as-is unless empty
    Literal(&'a str),
    /// Each key is included iff its flag is set, in insertion order
    Conditional(Vec<(&'a str, bool)>),
}

impl<'a> From<&'a str> for ClassInput<'a> {
    fn from(value: &'a str) -> Self {
        ClassInput::Literal(value)
    }
}

/// Compose class names left to right, joined by single spaces
pub fn compose_class_names(inputs: &[ClassInput<'_>]) -> String {
    let mut classes: Vec<&str> = Vec::new();
    for input in inputs {
        match input {
            ClassInput::Literal(class) if !class.is_empty() => classes.push(*class),
            ClassInput::Literal(_) => {}
            ClassInput::Conditional(entries) => classes.extend(
                entries
                    .iter()
                    .filter(|(_, included)| *included)
                    .map(|(class, _)| *class),
            ),
        }
    }
    classes.join(" ")
}
