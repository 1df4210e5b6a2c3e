use super::render::escape_html;

const QUOTE_PAGE_URL: &str = "https://finance.yahoo.com/quote/";

/// Where a ticker symbol in a holdings table links to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymbolLinks {
    /// External quote page, opened in a new tab
    #[default]
    External,
    /// The dashboard's own stock analyzer page
    Internal,
}

impl SymbolLinks {
    /// Reads `external` or `internal`; anything else keeps the default.
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "internal" => SymbolLinks::Internal,
            _ => SymbolLinks::External,
        }
    }

    pub fn href(&self, symbol: &str) -> String {
        let encoded = urlencoding::encode(symbol);
        match self {
            SymbolLinks::External => format!("{QUOTE_PAGE_URL}{encoded}"),
            SymbolLinks::Internal => format!("/analyzer?symbol={encoded}"),
        }
    }

    pub fn anchor(&self, symbol: &str) -> String {
        let target = match self {
            SymbolLinks::External => r#" target="_blank" rel="noopener""#,
            SymbolLinks::Internal => "",
        };
        format!(
            r#"<a href="{}"{}>{}</a>"#,
            escape_html(&self.href(symbol)),
            target,
            escape_html(symbol)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_setting() {
        assert_eq!(SymbolLinks::from_setting("internal"), SymbolLinks::Internal);
        assert_eq!(SymbolLinks::from_setting(" INTERNAL "), SymbolLinks::Internal);
        assert_eq!(SymbolLinks::from_setting("external"), SymbolLinks::External);
        assert_eq!(SymbolLinks::from_setting("bogus"), SymbolLinks::External);
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(
            SymbolLinks::External.href("NVDA"),
            "https://finance.yahoo.com/quote/NVDA"
        );
        assert_eq!(SymbolLinks::Internal.href("BRK.B"), "/analyzer?symbol=BRK.B");
        assert_eq!(SymbolLinks::Internal.href("A&B"), "/analyzer?symbol=A%26B");
    }

    #[test]
    fn test_anchor_escapes_symbol() {
        let html = SymbolLinks::External.anchor("<X>");
        assert_eq!(
            html,
            r#"<a href="https://finance.yahoo.com/quote/%3CX%3E" target="_blank" rel="noopener">&lt;X&gt;</a>"#
        );
        assert_eq!(
            SymbolLinks::Internal.anchor("MSFT"),
            r#"<a href="/analyzer?symbol=MSFT">MSFT</a>"#
        );
    }
}
