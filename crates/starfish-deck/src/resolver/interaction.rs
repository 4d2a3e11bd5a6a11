// crates/starfish-deck/src/resolver/interaction.rs

use super::utils::{Scope, name_list, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::types;
use log::warn;

/// Resolves every `<interaction>` of a container, in document order.
pub(super) fn resolve_interactions(
    list: &model::InteractionList,
    scope: &Scope<'_>,
) -> Result<Vec<types::Interaction>, DeckError> {
    list.interaction
        .iter()
        .enumerate()
        .map(|(index, element)| resolve_interaction(element, index, scope))
        .collect()
}

fn resolve_interaction(
    model: &model::InteractionElement,
    index: usize,
    scope: &Scope<'_>,
) -> Result<types::Interaction, DeckError> {
    let name = owned_text(model.name.as_ref()).unwrap_or_else(|| {
        let fallback = format!("interaction_{}", index);
        warn!("{}: unnamed interaction, using {}", scope.file(), fallback);
        fallback
    });
    let scope = scope.nested(&format!("interaction[{}]", name));

    Ok(types::Interaction {
        interaction_type: text(model.interaction_type.as_ref())
            .map(types::InteractionType::from_tag)
            .unwrap_or_default(),
        materials: name_list(model.materials.as_ref()),
        prob: scope
            .float_list("prob", model.prob.as_ref())?
            .unwrap_or_default(),
        c_accom: scope.float("c_accom", model.c_accom.as_ref())?,
        c_rest: scope.float("c_rest", model.c_rest.as_ref())?,
        pair: owned_text(model.pair.as_ref()),
        sigma: owned_text(model.sigma.as_ref()),
        sigma_coeffs: scope
            .float_list("sigma_coeffs", model.sigma_coeffs.as_ref())?
            .unwrap_or_default(),
        sources: name_list(model.sources.as_ref()),
        products: name_list(model.products.as_ref()),
        rate: owned_text(model.rate.as_ref()),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InteractionType;

    fn list(xml: &str) -> model::InteractionList {
        quick_xml::de::from_str(xml).expect("test document should deserialize")
    }

    #[test]
    fn test_resolve_interactions() {
        let list = list(
            r#"<interactions>
                 <interaction name="wall" type="surface_hit">
                   <materials>O, SS</materials><prob>0.9, 0.1</prob><c_accom>0.5</c_accom>
                 </interaction>
                 <interaction name="cex" type="mcc">
                   <pair>O,O+</pair><sigma>const</sigma><sigma_coeffs>1e-18</sigma_coeffs>
                 </interaction>
                 <interaction type="chemistry">
                   <sources>O,e-</sources><products>O+,e-,e-</products><rate>arrhenius</rate>
                 </interaction>
               </interactions>"#,
        );

        let interactions = resolve_interactions(&list, &Scope::root("interactions.xml")).unwrap();
        assert_eq!(interactions.len(), 3);

        assert_eq!(interactions[0].interaction_type, InteractionType::SurfaceHit);
        assert_eq!(interactions[0].materials, vec!["O", "SS"]);
        assert_eq!(interactions[0].prob, vec![0.9, 0.1]);
        assert_eq!(interactions[0].c_accom, Some(0.5));

        assert_eq!(interactions[1].pair.as_deref(), Some("O,O+"));
        assert_eq!(interactions[1].sigma_coeffs, vec![1e-18]);
        assert!(interactions[1].prob.is_empty());

        assert_eq!(interactions[2].name, "interaction_2");
        assert_eq!(interactions[2].products, vec!["O+", "e-", "e-"]);
        assert_eq!(interactions[2].rate.as_deref(), Some("arrhenius"));
    }

    #[test]
    fn test_bad_probability_names_interaction() {
        let list = list(
            r#"<interactions><interaction name="w"><prob>high</prob></interaction></interactions>"#,
        );

        let err = resolve_interactions(&list, &Scope::root("interactions.xml")).unwrap_err();
        assert!(matches!(
            err,
            DeckError::MalformedDocument { path: Some(ref p), .. } if p == "interaction[w]/prob"
        ));
    }
}
