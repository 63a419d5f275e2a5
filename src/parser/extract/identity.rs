use scraper::ElementRef;

use crate::error::ExtractError;
use crate::parser::dom::{first_class, rendered_text};
use crate::parser::layout::{character_name, character_top};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    /// Element/type class of the name tag; scopes every later class match.
    pub affinity: String,
}

pub fn extract(root: ElementRef) -> Result<Identity, ExtractError> {
    let top = character_top()
        .find_first(root)
        .ok_or(ExtractError::MissingIdentity("character-top region"))?;
    let name_el = character_name()
        .find_first(top)
        .ok_or(ExtractError::MissingIdentity("name element"))?;

    let name = rendered_text(name_el).trim().to_string();
    if name.is_empty() {
        return Err(ExtractError::MissingIdentity("name text"));
    }
    let affinity = first_class(name_el)
        .ok_or(ExtractError::MissingIdentity("affinity class"))?
        .to_string();

    Ok(Identity { name, affinity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn name_and_affinity() {
        let doc = Html::parse_document(
            r#"<div class="character-top"><h1><strong class="electric S">Anby</strong></h1></div>"#,
        );
        let id = extract(doc.root_element()).unwrap();
        assert_eq!(id.name, "Anby");
        assert_eq!(id.affinity, "electric");
    }

    #[test]
    fn no_top_region() {
        let doc = Html::parse_document(r#"<strong class="ice">Ellen</strong>"#);
        assert_eq!(
            extract(doc.root_element()),
            Err(ExtractError::MissingIdentity("character-top region"))
        );
    }

    #[test]
    fn name_without_class() {
        let doc = Html::parse_document(r#"<div class="character-top"><strong>Ellen</strong></div>"#);
        assert_eq!(
            extract(doc.root_element()),
            Err(ExtractError::MissingIdentity("affinity class"))
        );
    }
}
