//! Standalone HTML page around a rendered chart.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps an SVG document in a minimal HTML5 page. The SVG is inlined as is.
pub fn build_html(title: &str, svg: &str) -> String {
    let title = escape(title);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>body{{font-family:sans-serif;margin:2rem;}} svg{{max-width:100%;height:auto;}}</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {svg}\n\
         </body>\n\
         </html>\n"
    )
}

/// Writes the page to a new `.html` file in the system temp directory and
/// returns its path. The file is kept after the process exits.
pub fn write_html_artifact(title: &str, svg: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("stockviz-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(build_html(title, svg).as_bytes())?;
    file.flush()?;

    let (_, path) = file.keep().map_err(|e| e.error)?;
    log::debug!("Chart written to {}", path.display());
    Ok(path)
}
