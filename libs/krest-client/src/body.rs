use serde_json::Value;

use crate::error::ClientError;

/// Body of a gateway response.
///
/// The REST proxy answers some calls (subscription, for one) with a bare
/// 2xx and nothing else, so "no body" is a normal outcome that callers
/// handle explicitly instead of probing the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
}

impl Body {
    /// Whitespace-only text counts as empty.
    pub fn parse(text: &str, context: &'static str) -> Result<Self, ClientError> {
        if text.trim().is_empty() {
            return Ok(Body::Empty);
        }
        serde_json::from_str(text)
            .map(Body::Json)
            .map_err(|source| ClientError::Json { context, source })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(v) => Some(v),
            Body::Empty => None,
        }
    }

    /// Parsed value, or `EmptyBody` for callers that need one.
    pub fn into_json(self, context: &'static str) -> Result<Value, ClientError> {
        match self {
            Body::Json(v) => Ok(v),
            Body::Empty => Err(ClientError::EmptyBody(context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_text_is_empty() {
        assert_eq!(Body::parse("", "t").unwrap(), Body::Empty);
        assert_eq!(Body::parse(" \n", "t").unwrap(), Body::Empty);
    }

    #[test]
    fn json_text_is_parsed() {
        let body = Body::parse(r#"{"instance_id":"x1"}"#, "t").unwrap();
        assert_eq!(body.as_json(), Some(&json!({"instance_id": "x1"})));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let err = Body::parse("<html>", "read records").unwrap_err();
        assert!(matches!(err, ClientError::Json { context: "read records", .. }));
    }

    #[test]
    fn empty_body_cannot_become_json() {
        let err = Body::Empty.into_json("read records").unwrap_err();
        assert!(matches!(err, ClientError::EmptyBody("read records")));
    }
}
