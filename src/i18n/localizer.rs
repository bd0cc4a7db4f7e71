//! Localizer
//!
//! Projects the active language onto every bound element in a document
//! and keeps the document title in sync. Elements opt in with the
//! `data-i18n` attribute (text content) or `data-i18n-placeholder`
//! (placeholder attribute).

use crate::constants::{I18N_ATTR, I18N_PLACEHOLDER_ATTR, SWAP_FADE_DURATION};
use crate::dom::{Document, NodeId};
use crate::i18n::{self, Lang};
use crate::motion::{Easing, MotionEngine, Tween, TweenProps};

/// Apply the translation set for `lang` to every bound element.
///
/// All lookups happen in a first pass before any mutation begins, so a
/// key is never read while content is mid-mutation and reads never
/// interleave with writes. Bindings are resolved freshly on every call.
///
/// With `animate`, each text swap is a brief fade/slide out, the mutation
/// once the outgoing leg completes, then a fade/slide back in.
/// Placeholder swaps are always instantaneous.
pub fn apply(doc: &mut Document, motion: &dyn MotionEngine, lang: Lang, animate: bool) {
    // Batch all reads first
    let mut text_updates: Vec<(NodeId, &'static str)> = Vec::new();
    for id in doc.elements_with_attr(I18N_ATTR) {
        let Some(key) = doc.get(id).attribute(I18N_ATTR) else {
            continue;
        };
        if let Some(translation) = i18n::lookup(lang, key) {
            text_updates.push((id, translation));
        }
    }

    let mut placeholder_updates: Vec<(NodeId, &'static str)> = Vec::new();
    for id in doc.elements_with_attr(I18N_PLACEHOLDER_ATTR) {
        let Some(key) = doc.get(id).attribute(I18N_PLACEHOLDER_ATTR) else {
            continue;
        };
        if let Some(translation) = i18n::lookup(lang, key) {
            placeholder_updates.push((id, translation));
        }
    }

    // Now perform all writes
    if animate {
        for (id, translation) in text_updates {
            let fade_out = Tween::to(TweenProps::new().opacity(0.0).y(-5.0))
                .duration(SWAP_FADE_DURATION)
                .ease(Easing::PowerIn(2));
            motion.animate_to(
                doc,
                &[id],
                fade_out,
                Some(Box::new(move |doc, motion| {
                    doc.get_mut(id).set_text(translation);
                    let fade_in = Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                        .duration(SWAP_FADE_DURATION)
                        .ease(Easing::PowerOut(2));
                    motion.animate_to(doc, &[id], fade_in, None);
                })),
            );
        }
    } else {
        for (id, translation) in text_updates {
            doc.get_mut(id).set_text(translation);
        }
    }

    for (id, translation) in placeholder_updates {
        doc.get_mut(id).set_attribute("placeholder", translation);
    }

    doc.set_title(i18n::page_title(lang));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::motion::ImmediateEngine;

    fn page() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let title = doc.append(
            root,
            Element::new("h1").with_attr(I18N_ATTR, "hero.title1").with_text("We Build"),
        );
        let unknown = doc.append(
            root,
            Element::new("span").with_attr(I18N_ATTR, "hero.title9").with_text("untouched"),
        );
        let input = doc.append(
            root,
            Element::new("input")
                .with_attr(I18N_PLACEHOLDER_ATTR, "contact.form.subjectPlaceholder")
                .with_attr("placeholder", "What's this about?"),
        );
        (doc, title, unknown, input)
    }

    #[test]
    fn test_apply_replaces_bound_text() {
        let (mut doc, title, _, _) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, false);
        assert_eq!(doc.get(title).text(), "Razvijamo");
    }

    #[test]
    fn test_missing_key_leaves_text_unchanged() {
        let (mut doc, _, unknown, _) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, false);
        assert_eq!(doc.get(unknown).text(), "untouched");
        apply(&mut doc, &ImmediateEngine, Lang::En, true);
        assert_eq!(doc.get(unknown).text(), "untouched");
    }

    #[test]
    fn test_placeholders_update_instantly() {
        let (mut doc, _, _, input) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, true);
        assert_eq!(doc.get(input).attribute("placeholder"), Some("O čemu se radi?"));
    }

    #[test]
    fn test_title_follows_language() {
        let (mut doc, _, _, _) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, false);
        assert_eq!(doc.title(), i18n::page_title(Lang::Sr));
        apply(&mut doc, &ImmediateEngine, Lang::En, false);
        assert_eq!(doc.title(), i18n::page_title(Lang::En));
    }

    #[test]
    fn test_animated_apply_reaches_same_end_state() {
        let (mut doc, title, _, _) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, true);
        assert_eq!(doc.get(title).text(), "Razvijamo");
        // fade-in leg leaves the element visible again
        assert_eq!(doc.get(title).style("opacity"), Some("1"));
    }

    #[test]
    fn test_bindings_resolve_freshly_per_apply() {
        let (mut doc, title, _, _) = page();
        apply(&mut doc, &ImmediateEngine, Lang::Sr, false);
        // rebinding the element picks up the new key on the next apply
        doc.get_mut(title).set_attribute(I18N_ATTR, "hero.title2");
        apply(&mut doc, &ImmediateEngine, Lang::Sr, false);
        assert_eq!(doc.get(title).text(), "Finansijsku Tehnologiju");
    }
}
