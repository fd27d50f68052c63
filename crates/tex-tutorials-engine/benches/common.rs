// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_tutorial(sections: usize) -> String {
    let mut content = String::from(
        "\\documentclass{article}\n\\title{Benchmark}\n\\keywords{bench, parsing}\n\\begin{document}\n",
    );

    for section in 0..sections {
        content.push_str(&format!("\\section{{Section {section}}}\n"));
        content.push_str(
            "Some \\textbf{bold} and \\emph{soft} prose with inline $x^2$ math \
             and a citation \\cite{key",
        );
        content.push_str(&format!("{}}}.\n\n", section % 7));
        content.push_str(&generate_nested_list(3));
        content.push_str(
            "\\begin{lstlisting}[language=Scheme]\n(define (square x)\n  (* x x))\n\n;; cheat: (square 4)\n\\end{lstlisting}\n\n",
        );
        content.push_str("\\begin{equation}\nE = mc^2\n\\end{equation}\n\n");
    }

    content.push_str("\\section{Further Explorations}\n\\begin{thebibliography}{9}\n");
    for key in 0..7 {
        content.push_str(&format!(
            "\\bibitem{{key{key}}} Author, A. \\textit{{Title {key}}}. Press, 2001.\n"
        ));
    }
    content.push_str("\\end{thebibliography}\n\\end{document}\n");
    content
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let mut content = String::from("\\begin{itemize}\n");
    for i in 0..3 {
        content.push_str(&format!("\\item Item {i} at depth {depth}\n"));
    }
    content.push_str(&generate_nested_list(depth - 1));
    content.push_str("\\end{itemize}\n\n");
    content
}

#[allow(dead_code)]
pub fn generate_inline_paragraph(repeats: usize) -> String {
    "Text with \\textbf{bold}, \\texttt{code}, \\url{https://example.org} and \\ref{fig:one}. "
        .repeat(repeats)
}
