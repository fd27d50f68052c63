/// How the scanner treats a `\begin{name}` ... `\end{name}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Document,
    Code(CodeEnv),
    Pseudocode,
    /// `keep_source` environments store the whole `\begin..\end` text as the
    /// formula so alignment markup survives.
    Math { keep_source: bool },
    Container(Container),
    /// Body dropped from content.
    Skipped,
    /// Unrecognised: markers are dropped and the body flows as text.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeEnv {
    Verbatim,
    /// `lstlisting` with optional `[language=X]`
    Listing,
    /// `minted` with optional `[options]` and required `{language}`
    Minted,
}

/// Environments whose body is parsed into nested structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    List(ListKind),
    Bibliography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Itemize,
    Enumerate,
    Description,
}

impl ListKind {
    pub fn ordered(self) -> bool {
        matches!(self, ListKind::Enumerate)
    }

    pub fn env_name(self) -> &'static str {
        match self {
            ListKind::Itemize => "itemize",
            ListKind::Enumerate => "enumerate",
            ListKind::Description => "description",
        }
    }
}

impl Container {
    pub fn env_name(self) -> &'static str {
        match self {
            Container::List(kind) => kind.env_name(),
            Container::Bibliography => Environment::BIBLIOGRAPHY,
        }
    }
}

impl Environment {
    pub const DOCUMENT: &'static str = "document";
    pub const BIBLIOGRAPHY: &'static str = "thebibliography";
    /// Name reported for `\[..\]` and `$$..$$` blocks.
    pub const DISPLAY_MATH: &'static str = "displaymath";

    pub fn classify(name: &str) -> Self {
        match name {
            Self::DOCUMENT => Environment::Document,
            "verbatim" => Environment::Code(CodeEnv::Verbatim),
            "lstlisting" => Environment::Code(CodeEnv::Listing),
            "minted" => Environment::Code(CodeEnv::Minted),
            "algpseudocode" | "algorithmic" => Environment::Pseudocode,
            "equation" | "equation*" | "displaymath" => Environment::Math { keep_source: false },
            "align" | "align*" | "gather" | "gather*" | "multline" | "multline*" => {
                Environment::Math { keep_source: true }
            }
            "itemize" => Environment::Container(Container::List(ListKind::Itemize)),
            "enumerate" => Environment::Container(Container::List(ListKind::Enumerate)),
            "description" => Environment::Container(Container::List(ListKind::Description)),
            Self::BIBLIOGRAPHY => Environment::Container(Container::Bibliography),
            "abstract" | "comment" => Environment::Skipped,
            _ => Environment::Other,
        }
    }
}
