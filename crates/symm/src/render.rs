use crate::CharacterTable;

/// the two ways a registered descriptor can be printed
pub trait Render {
    /// the human-readable form
    fn render_plain(&self) -> String;

    /// the LaTeX form, for pasting into papers
    fn render_latex(&self) -> String;
}

impl Render for CharacterTable {
    fn render_plain(&self) -> String {
        self.to_string()
    }

    fn render_latex(&self) -> String {
        self.latex()
    }
}
