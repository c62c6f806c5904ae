use std::fmt::Write as _;

/// One report section: an optional `-- heading --` line and a body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub body: String,
}

impl Section {
    pub fn headed(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            body: body.into(),
        }
    }

    pub fn bare(body: impl Into<String>) -> Self {
        Self {
            heading: None,
            body: body.into(),
        }
    }
}

/// Concatenate sections in the given order. A heading renders as a blank
/// line followed by `-- <heading> --`; bare sections contribute their
/// body verbatim.
pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        if let Some(heading) = &section.heading {
            let _ = writeln!(out, "\n-- {heading} --");
        }
        out.push_str(&section.body);
    }
    out
}
