use crate::models::Property;
use crate::page::lead_form::{FormField, LeadForm, SIMULATED_ACK_DELAY};
use crate::showcase::{aggregate, duplicate_ids, WorkingSet};
use std::time::Duration;
use tracing::{debug, warn};

/// Horizontal distance of one carousel arrow click
pub const CAROUSEL_STEP_PX: u32 = 400;

/// Vertical scroll past which the back-to-top button shows
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Everything that can happen to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Feed fetch finished (possibly empty after a failure)
    PropertiesLoaded(Vec<Property>),
    HoverProperty(Option<String>),
    ToggleFaq(usize),
    ScrollCarousel(ScrollDirection),
    WindowScrolled(f64),
    FormFieldChanged(FormField, String),
    SubmitForm,
    SubmissionAcknowledged,
}

/// Side effects requested by [`update`], run by the page runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FitMapBounds,
    ScheduleAcknowledgement(Duration),
}

#[derive(Debug, Clone)]
pub struct PageState {
    featured: Vec<Property>,
    working: WorkingSet,
    hovered_id: Option<String>,
    open_faq: Option<usize>,
    carousel_offset: u32,
    show_back_to_top: bool,
    form: LeadForm,
}

impl PageState {
    pub fn new(featured: Vec<Property>) -> Self {
        Self {
            featured,
            working: WorkingSet::default(),
            hovered_id: None,
            open_faq: None,
            carousel_offset: 0,
            show_back_to_top: false,
            form: LeadForm::default(),
        }
    }

    pub fn working(&self) -> &WorkingSet {
        &self.working
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    pub fn carousel_offset(&self) -> u32 {
        self.carousel_offset
    }

    /// Card currently scrolled into view, for the progress dots
    pub fn carousel_index(&self) -> usize {
        (self.carousel_offset / CAROUSEL_STEP_PX) as usize
    }

    pub fn show_back_to_top(&self) -> bool {
        self.show_back_to_top
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    fn carousel_max_offset(&self) -> u32 {
        let cards = u32::try_from(self.working.len()).unwrap_or(u32::MAX);
        cards.saturating_sub(1).saturating_mul(CAROUSEL_STEP_PX)
    }
}

/// Applies `msg` to `state` and returns the effects it calls for
pub fn update(state: &mut PageState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PropertiesLoaded(fetched) => {
            let working = aggregate(&state.featured, fetched);

            let duplicates = duplicate_ids(&working);
            if !duplicates.is_empty() {
                warn!("Working set lists some properties twice: {:?}", duplicates);
            }

            state.working.replace(working);
            state.carousel_offset = state.carousel_offset.min(state.carousel_max_offset());
            debug!(
                "Working set revision {} holds {} properties",
                state.working.revision(),
                state.working.len()
            );
            vec![Effect::FitMapBounds]
        }
        Msg::HoverProperty(id) => {
            state.hovered_id = id;
            Vec::new()
        }
        Msg::ToggleFaq(index) => {
            state.open_faq = if state.open_faq == Some(index) {
                None
            } else {
                Some(index)
            };
            Vec::new()
        }
        Msg::ScrollCarousel(direction) => {
            state.carousel_offset = match direction {
                ScrollDirection::Left => state.carousel_offset.saturating_sub(CAROUSEL_STEP_PX),
                ScrollDirection::Right => state
                    .carousel_offset
                    .saturating_add(CAROUSEL_STEP_PX)
                    .min(state.carousel_max_offset()),
            };
            Vec::new()
        }
        Msg::WindowScrolled(y) => {
            state.show_back_to_top = y > BACK_TO_TOP_THRESHOLD;
            Vec::new()
        }
        Msg::FormFieldChanged(field, value) => {
            state.form.set(field, value);
            Vec::new()
        }
        Msg::SubmitForm => {
            if state.form.begin_submit() {
                debug!("Lead form submitted");
                vec![Effect::ScheduleAcknowledgement(SIMULATED_ACK_DELAY)]
            } else {
                debug!("Ignoring submit: form incomplete or already in flight");
                Vec::new()
            }
        }
        Msg::SubmissionAcknowledged => {
            if !state.form.acknowledge() {
                debug!("Ignoring acknowledgment with no submission in flight");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{sample_property, ListingStatus};
    use crate::page::lead_form::FormStatus;
    use crate::showcase::featured_sold;

    /// Messages that fill every lead form field with valid input
    pub(crate) fn complete_form_messages() -> Vec<Msg> {
        vec![
            Msg::FormFieldChanged(FormField::Name, "Marta".to_string()),
            Msg::FormFieldChanged(FormField::Phone, "+34 600 000 000".to_string()),
            Msg::FormFieldChanged(FormField::Email, "marta@example.com".to_string()),
            Msg::FormFieldChanged(FormField::Address, "Calle Mayor 3, Gandía".to_string()),
        ]
    }

    fn loaded_page(fetched: Vec<Property>) -> PageState {
        let mut state = PageState::new(featured_sold());
        update(&mut state, Msg::PropertiesLoaded(fetched));
        state
    }

    #[test]
    fn loading_rebuilds_working_set_and_requests_fit() {
        let mut state = PageState::new(featured_sold());
        let effects = update(
            &mut state,
            Msg::PropertiesLoaded(vec![
                sample_property("A", ListingStatus::Sold),
                sample_property("B", ListingStatus::parse("active")),
                sample_property("C", ListingStatus::Reserved),
            ]),
        );

        assert_eq!(effects, [Effect::FitMapBounds]);
        assert_eq!(state.working().revision(), 1);

        let ids: Vec<_> = state.working().properties().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["sold-1", "sold-2", "sold-3", "sold-4", "A"]);
    }

    #[test]
    fn failed_fetch_leaves_featured_only() {
        let state = loaded_page(Vec::new());
        assert_eq!(state.working().properties(), featured_sold().as_slice());
    }

    #[test]
    fn faq_toggles_single_entry() {
        let mut state = PageState::new(Vec::new());

        update(&mut state, Msg::ToggleFaq(2));
        assert_eq!(state.open_faq(), Some(2));

        update(&mut state, Msg::ToggleFaq(4));
        assert_eq!(state.open_faq(), Some(4));

        update(&mut state, Msg::ToggleFaq(4));
        assert_eq!(state.open_faq(), None);
    }

    #[test]
    fn carousel_scroll_is_clamped() {
        let mut state = loaded_page(Vec::new());

        update(&mut state, Msg::ScrollCarousel(ScrollDirection::Left));
        assert_eq!(state.carousel_offset(), 0);

        for _ in 0..10 {
            update(&mut state, Msg::ScrollCarousel(ScrollDirection::Right));
        }
        assert_eq!(state.carousel_offset(), 3 * CAROUSEL_STEP_PX);
        assert_eq!(state.carousel_index(), 3);

        update(&mut state, Msg::ScrollCarousel(ScrollDirection::Left));
        assert_eq!(state.carousel_index(), 2);
    }

    #[test]
    fn back_to_top_threshold() {
        let mut state = PageState::new(Vec::new());

        update(&mut state, Msg::WindowScrolled(400.0));
        assert!(!state.show_back_to_top());

        update(&mut state, Msg::WindowScrolled(401.0));
        assert!(state.show_back_to_top());

        update(&mut state, Msg::WindowScrolled(0.0));
        assert!(!state.show_back_to_top());
    }

    #[test]
    fn hover_tracks_single_id() {
        let mut state = loaded_page(Vec::new());

        update(&mut state, Msg::HoverProperty(Some("sold-2".to_string())));
        assert_eq!(state.hovered_id(), Some("sold-2"));

        update(&mut state, Msg::HoverProperty(None));
        assert_eq!(state.hovered_id(), None);
    }

    #[test]
    fn submit_schedules_single_acknowledgment() {
        let mut state = PageState::new(Vec::new());
        for msg in complete_form_messages() {
            update(&mut state, msg);
        }

        let effects = update(&mut state, Msg::SubmitForm);
        assert_eq!(effects, [Effect::ScheduleAcknowledgement(SIMULATED_ACK_DELAY)]);
        assert!(update(&mut state, Msg::SubmitForm).is_empty());
        assert_eq!(state.form().status, FormStatus::Submitting);

        update(&mut state, Msg::SubmissionAcknowledged);
        assert_eq!(state.form().status, FormStatus::Success);
        assert!(state.form().phone.is_empty());
    }

    #[test]
    fn incomplete_form_schedules_nothing() {
        let mut state = PageState::new(Vec::new());
        assert!(update(&mut state, Msg::SubmitForm).is_empty());
        assert_eq!(state.form().status, FormStatus::Idle);

        for msg in complete_form_messages() {
            update(&mut state, msg);
        }
        update(
            &mut state,
            Msg::FormFieldChanged(FormField::Email, "not-an-email".to_string()),
        );
        assert!(update(&mut state, Msg::SubmitForm).is_empty());
        assert_eq!(state.form().status, FormStatus::Idle);
    }
}
