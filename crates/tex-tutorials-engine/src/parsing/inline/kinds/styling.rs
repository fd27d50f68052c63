/// Commands that wrap their single argument in an HTML element.
pub struct Styling;

impl Styling {
    const WRAPPERS: &'static [(&'static str, &'static str)] = &[
        ("textbf", "strong"),
        ("paragraph", "strong"),
        ("emph", "em"),
        ("textit", "em"),
        ("underline", "u"),
    ];

    /// Cross-reference commands rendered as `[Ref: key]`.
    pub const REFERENCES: &'static [&'static str] = &["ref", "eqref", "autoref", "cref"];

    /// Commands whose argument is dropped from the output.
    pub const DISCARDED: &'static [&'static str] = &["footnote", "label"];

    /// Argument-less commands that produce no output.
    pub const NO_OPS: &'static [&'static str] = &[
        "maketitle",
        "noindent",
        "indent",
        "centering",
        "smallskip",
        "medskip",
        "bigskip",
        "hfill",
        "newpage",
        "clearpage",
        "tableofcontents",
    ];

    pub const SPACE_COMMAND: &'static str = "space";
    pub const SPACER: &'static str = "<span class='w-20'></span>";
    pub const NEWLINE_COMMAND: &'static str = "newline";
    pub const LINE_BREAK: &'static str = "<br>";
    pub const NBSP: &'static str = "&nbsp;";

    /// HTML tag for a wrapping command, if `name` is one.
    pub fn tag_for(name: &str) -> Option<&'static str> {
        Self::WRAPPERS
            .iter()
            .find(|(cmd, _)| *cmd == name)
            .map(|(_, tag)| *tag)
    }
}
