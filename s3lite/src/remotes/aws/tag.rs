//! Literal tag scanning over response bodies.
//!
//! This is not an XML parser. Tags are matched as exact byte strings: no
//! attributes, namespaces, CDATA, entity decoding or nesting awareness. It is
//! enough for the flat error and bucket-listing documents the service returns,
//! and callers only go through [`ErrorResponse::parse`] and [`bucket_names`]
//! so the scanner can be replaced without touching them.

const REDIRECT_CODE: &str = "TemporaryRedirect";

/// Finds the first `start_tag` at or after `from` and the first `end_tag`
/// after it. Returns the text strictly between them and the position right
/// after `end_tag`, or `None` when either tag is missing.
pub fn extract<'a>(
    body: &'a str,
    start_tag: &str,
    end_tag: &str,
    from: usize,
) -> Option<(&'a str, usize)> {
    let start = from + body.get(from..)?.find(start_tag)? + start_tag.len();
    let end = start + body[start..].find(end_tag)?;
    Some((&body[start..end], end + end_tag.len()))
}

/// Every `start_tag`...`end_tag` pair in document order.
pub fn extract_all<'a>(body: &'a str, start_tag: &'a str, end_tag: &'a str) -> Tags<'a> {
    Tags {
        body,
        start_tag,
        end_tag,
        pos: 0,
    }
}

pub struct Tags<'a> {
    body: &'a str,
    start_tag: &'a str,
    end_tag: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (text, next) = extract(self.body, self.start_tag, self.end_tag, self.pos)?;
        self.pos = next;
        Some(text)
    }
}

/// The fields of a service error document this client acts on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Only read for `TemporaryRedirect`.
    pub endpoint: Option<String>,
}

impl ErrorResponse {
    /// Missing tags leave the field empty instead of failing.
    pub fn parse(body: &str) -> Self {
        let field = |tag: &str, close: &str| {
            extract(body, tag, close, 0)
                .map(|(text, _)| text.to_string())
                .unwrap_or_default()
        };
        let code = field("<Code>", "</Code>");
        let endpoint = (code == REDIRECT_CODE)
            .then(|| extract(body, "<Endpoint>", "</Endpoint>", 0))
            .flatten()
            .map(|(text, _)| text.to_string());

        Self {
            message: field("<Message>", "</Message>"),
            code,
            endpoint,
        }
    }

    pub fn is_temporary_redirect(&self) -> bool {
        self.code == REDIRECT_CODE
    }
}

/// Bucket names from a `ListAllMyBuckets` document, in document order.
/// Empty `<Name></Name>` pairs are skipped.
pub fn bucket_names(body: &str) -> Vec<String> {
    extract_all(body, "<Name>", "</Name>")
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
