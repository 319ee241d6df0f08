//! Prompt composition: parameters plus asset presence become the model
//! instruction text.

use crate::ad::params::AdParameters;
use crate::asset::{AssetSlot, AssetStore};

/// Composes the generation instruction for the given configuration.
///
/// Pure function of the parameter text fields and of which optional
/// assets are present; identical inputs always yield the identical
/// string. The result is also stamped verbatim onto the creative so a
/// finished ad can be traced back to its exact instruction.
pub fn compose(params: &AdParameters, assets: &AssetStore) -> String {
    let mut prompt = format!(
        "Create a high-impact Meta Ad for the brand \"{}\".\n\n",
        params.brand_name
    );

    prompt.push_str("IMPORTANT BRANDING & LOGO:\n");
    prompt.push_str(&format!(
        "- BRAND NAME: The brand is named \"{}\".\n",
        params.brand_name
    ));
    if assets.get(AssetSlot::Logo).is_some() {
        prompt.push_str(
            "- LOGO PROVIDED: Use the provided Logo Image. Place it professionally in a corner or alongside the brand name.\n",
        );
    } else {
        prompt.push_str(&format!(
            "- BRAND TEXT: Place the brand name \"{}\" elegantly in a premium font.\n",
            params.brand_name
        ));
    }

    prompt.push_str("\nCRITICAL SALE DETAILS:\n");
    prompt.push_str("- The product is ON SALE.\n");
    prompt.push_str(&format!(
        "- Regular Price: {} {}\n",
        params.actual_price, params.currency
    ));
    prompt.push_str(&format!(
        "- Sale Price: {} {}\n",
        params.sale_price, params.currency
    ));
    prompt.push_str(&format!(
        "- The price drop from {} to {} must be the primary visual highlight.\n",
        params.actual_price, params.sale_price
    ));

    prompt.push_str("\nCOMPOSITION:\n");
    prompt.push_str(
        "- HERO: Use the provided Product Image as the central focus. Ensure the product looks high-end.\n",
    );
    if assets.get(AssetSlot::Concept).is_some() {
        prompt.push_str(
            "- STYLE REFERENCE: Incorporate the aesthetic, lighting, and premium layout vibes from the Concept Image.\n",
        );
    }
    prompt.push_str("- TEXT OVERLAYS:\n");
    prompt.push_str(&format!(
        "  1. \"{}\" in a bold, professional font.\n",
        params.slogan
    ));
    prompt.push_str("  2. \"HUGE SALE\" or \"SPECIAL OFFER\" badge.\n");
    prompt.push_str(&format!(
        "  3. \"NOW ONLY {}\" (make this the biggest text).\n",
        params.sale_price
    ));
    prompt.push_str(&format!(
        "  4. \"WAS {}\" (crossed out or smaller).\n",
        params.actual_price
    ));
    prompt.push_str(
        "- ATMOSPHERE: High-end, clean studio lighting with a complementary lifestyle background.\n",
    );

    prompt.push_str(
        "\nEnsure the final image looks like a professional social media advertisement ready for Meta platforms. The brand logo/name must be integrated seamlessly.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::EncodedAsset;

    fn params() -> AdParameters {
        AdParameters {
            brand_name: "Acme".to_owned(),
            slogan: "GO FAST".to_owned(),
            actual_price: "100".to_owned(),
            sale_price: "80".to_owned(),
            currency: "USD".to_owned(),
            ..AdParameters::default()
        }
    }

    #[test]
    fn test_contains_brand_prices_and_currency() {
        let prompt = compose(&params(), &AssetStore::new());
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("100"));
        assert!(prompt.contains("80"));
        assert!(prompt.contains("USD"));
        assert!(prompt.contains("GO FAST"));
    }

    #[test]
    fn test_logo_branch() {
        let mut assets = AssetStore::new();
        let without_logo = compose(&params(), &assets);
        assert!(without_logo.contains("premium font"));
        assert!(!without_logo.contains("LOGO PROVIDED"));

        assets.set(AssetSlot::Logo, EncodedAsset::from_bytes(vec![1, 2, 3]));
        let with_logo = compose(&params(), &assets);
        assert!(with_logo.contains("LOGO PROVIDED"));
        assert!(!with_logo.contains("premium font"));
    }

    #[test]
    fn test_style_reference_only_when_concept_present() {
        let mut assets = AssetStore::new();
        assert!(!compose(&params(), &assets).contains("STYLE REFERENCE"));

        assets.set(AssetSlot::Concept, EncodedAsset::from_bytes(vec![9]));
        assert!(compose(&params(), &assets).contains("STYLE REFERENCE"));
    }

    #[test]
    fn test_overlay_instructions() {
        let prompt = compose(&params(), &AssetStore::new());
        assert!(prompt.contains("\"HUGE SALE\" or \"SPECIAL OFFER\" badge"));
        assert!(prompt.contains("NOW ONLY 80"));
        assert!(prompt.contains("WAS 100"));
        assert!(prompt.contains("ready for Meta platforms"));
    }

    #[test]
    fn test_idempotent() {
        let assets = AssetStore::new();
        let p = params();
        assert_eq!(compose(&p, &assets), compose(&p, &assets));
    }
}
