use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Renders a blog post body to HTML that is safe to inject into the page.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Strips scripts, event handlers and relative links; outbound links get `nofollow`.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tables_and_headings() {
        let html = safe_markdown_to_html("## Results\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h2>Results</h2>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn drops_inline_script_and_handlers() {
        let html = safe_markdown_to_html("<img src=\"https://x.org/a.png\" onerror=\"alert(1)\">\n<script>x()</script>");
        assert!(!html.contains("onerror"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn links_are_marked_nofollow() {
        let html = safe_markdown_to_html("[club](https://club.example.org)");
        assert!(html.contains("rel=\"nofollow noopener noreferrer\""));
    }
}
