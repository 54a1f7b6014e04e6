use dioxus::prelude::*;
use dioxus_logger::tracing;
use model::prefs::card_prefs::CardPrefs;

use crate::actions::Resolved;
use crate::card_state::CardView;
use crate::card_state::EntityRef;

/// Owns a card's view state and resets it whenever the supplied entity
/// changes, including to or from "no entity".
///
/// The check runs while rendering, so the render that shows a new entity
/// never carries the previous one's load or copy state.
pub fn use_card_view(entity: EntityRef, prefs: CardPrefs) -> Signal<CardView> {
    let mut view = use_signal(|| CardView::new(&Resolved::from_supplied(entity.get().cloned()), &prefs));

    if !view.peek().is_current(entity.get()) {
        tracing::debug!(
            "verification card: entity changed to {:?}",
            entity.get().map(|ngo| ngo.id.as_str())
        );
        let resolved = Resolved::from_supplied(entity.into_inner());
        view.write().reset(&resolved, &prefs);
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_state::CopyField;
    use crate::card_state::LoadPhase;
    use dioxus::core::ScopeId;
    use dioxus::core::VirtualDom;
    use model::Ngo;
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared between a test and the component under test.
    #[derive(Clone, Default)]
    struct Harness {
        supplied: Rc<RefCell<Option<Rc<Ngo>>>>,
        /// Marks Phone as copied and the logo as loaded on the next render.
        settle: Rc<Cell<bool>>,
        seen: Rc<RefCell<Option<CardView>>>,
    }

    fn host(harness: Harness) -> Element {
        let entity = EntityRef::new(harness.supplied.borrow().clone());
        let mut view = use_card_view(entity, CardPrefs::default());
        if harness.settle.replace(false) {
            let mut state = view.write();
            state.mark_copied(CopyField::Phone);
            state.logo.on_load();
        }
        *harness.seen.borrow_mut() = Some(view.peek().clone());
        rsx! {}
    }

    fn ngo(id: &str) -> Ngo {
        Ngo {
            id: id.to_string(),
            phone: Some("+91 98765 43210".to_string()),
            ..Default::default()
        }
    }

    fn rerender(dom: &mut VirtualDom) {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
    }

    fn seen(harness: &Harness) -> CardView {
        harness.seen.borrow().clone().unwrap()
    }

    #[test]
    fn test_new_reference_with_equal_contents_resets() {
        let harness = Harness::default();
        let first = Rc::new(ngo("x7"));
        *harness.supplied.borrow_mut() = Some(first.clone());
        harness.settle.set(true);

        let mut dom = VirtualDom::new_with_props(host, harness.clone());
        dom.rebuild_in_place();
        assert_eq!(seen(&harness).copied_field(), Some(CopyField::Phone));
        assert!(seen(&harness).logo.is_loaded());

        // same reference again: state is kept
        rerender(&mut dom);
        assert_eq!(seen(&harness).copied_field(), Some(CopyField::Phone));

        // equal contents, new allocation: a different entity
        *harness.supplied.borrow_mut() = Some(Rc::new((*first).clone()));
        rerender(&mut dom);
        let view = seen(&harness);
        assert_eq!(view.copied_field(), None);
        assert_eq!(view.logo.phase(), LoadPhase::Loading);
        assert_eq!(view.generation(), 1);
    }

    #[test]
    fn test_switching_to_demo_resets() {
        let harness = Harness::default();
        *harness.supplied.borrow_mut() = Some(Rc::new(ngo("x7")));
        harness.settle.set(true);

        let mut dom = VirtualDom::new_with_props(host, harness.clone());
        dom.rebuild_in_place();
        assert!(seen(&harness).is_copied(CopyField::Phone));

        *harness.supplied.borrow_mut() = None;
        rerender(&mut dom);
        let view = seen(&harness);
        assert!(view.is_current(None));
        assert_eq!(view.copied_field(), None);
        assert!(!view.logo.is_loaded());
    }
}
