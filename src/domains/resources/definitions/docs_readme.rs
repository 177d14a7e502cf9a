//! Documentation readme resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Server documentation resource (static Markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "calc://docs/readme";
    const NAME: &'static str = "Calculator Documentation";
    const DESCRIPTION: &'static str = "Tool catalogue, rounding rules and result strings of this server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# Decimal Calculator

Arbitrary-precision decimal arithmetic and trigonometry as MCP tools.

## Arithmetic

Input: `{ "numbers": [...] }`. Results use the configured precision
(default 20 significant digits) with no further rounding.

- `add`: sum, `0` for an empty array
- `subtract`: first minus the rest, at least two numbers. A single
  number fails with `Subtraction requires at least two numbers` instead of
  being returned unchanged.
- `multiply`: product, `1` for an empty array
- `divide`: first divided by the rest, at least two numbers.
  Returns `Cannot divide by zero` if any divisor is zero.

## Trigonometry

- `sin`, `cos`, `tan`: `{ "angles": [...], "mode": "radians" | "degrees" }`.
  `tan` returns `Undefined (angle is π/2 + nπ)` at singularities.
- `asin`, `acos`: `{ "values": [...] }`, every value in [-1, 1]
- `atan`: `{ "values": [...] }`

## Hyperbolic

- `sinh`, `cosh`, `tanh`, `asinh`: `{ "values": [...] }`
- `acosh`: every value >= 1
- `atanh`: every value strictly between -1 and 1

Trigonometric and hyperbolic results are rounded to 15 decimal places,
except `asinh`. One input returns a string; several inputs return a JSON
array of strings.

## Precision

- `set_precision`: `{ "precision": n }`, shared by all later calls
- `get_precision`: current setting

## Resources

- `calc://server/info`: server information
- `calc://precision`: current precision
- `calc://docs/readme`: this documentation
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_readme_metadata() {
        assert_eq!(DocsReadmeResource::URI, "calc://docs/readme");
        assert_eq!(DocsReadmeResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_docs_readme_mentions_sentinels() {
        match DocsReadmeResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("Cannot divide by zero"));
                assert!(text.contains("Undefined (angle is π/2 + nπ)"));
                assert!(text.contains("Subtraction requires at least two numbers"));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
