// crates/starfish-deck/src/builder/interaction.rs

use super::{format_list, format_names, format_number, non_empty};
use crate::model;
use crate::types;

/// Builds the `<interactions>` document.
pub(super) fn build_model_interactions(
    interactions: &[types::Interaction],
) -> model::InteractionList {
    model::InteractionList {
        interaction: interactions.iter().map(build_model_interaction).collect(),
    }
}

fn build_model_interaction(interaction: &types::Interaction) -> model::InteractionElement {
    model::InteractionElement {
        name: Some(interaction.name.clone()),
        interaction_type: Some(interaction.interaction_type.to_string()),
        materials: non_empty(&interaction.materials, format_names),
        prob: non_empty(&interaction.prob, format_list),
        c_accom: interaction.c_accom.map(format_number),
        c_rest: interaction.c_rest.map(format_number),
        pair: interaction.pair.clone(),
        sigma: interaction.sigma.clone(),
        sigma_coeffs: non_empty(&interaction.sigma_coeffs, format_list),
        sources: non_empty(&interaction.sources, format_names),
        products: non_empty(&interaction.products, format_names),
        rate: interaction.rate.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Interaction, InteractionType};

    #[test]
    fn test_lists_are_comma_joined() {
        let mut interaction = Interaction::new("wall", InteractionType::SurfaceHit);
        interaction.materials = vec!["O".to_string(), "SS".to_string()];
        interaction.prob = vec![0.9, 0.1];

        let element = build_model_interaction(&interaction);
        assert_eq!(element.interaction_type.as_deref(), Some("surface_hit"));
        assert_eq!(element.materials.as_deref(), Some("O,SS"));
        assert_eq!(element.prob.as_deref(), Some("0.9,0.1"));
        assert_eq!(element.sigma_coeffs, None);
        assert_eq!(element.products, None);
    }
}
