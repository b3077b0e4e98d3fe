use crate::domain::price_tiers::api;
use contracts::domain::price_tier::{validate_price_tier, PriceTierDto, PriceTierErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the tier details form
#[derive(Clone, Copy)]
pub struct TierDetailsViewModel {
    pub form: RwSignal<PriceTierDto>,
    pub errors: RwSignal<PriceTierErrors>,
    pub error: RwSignal<Option<String>>,
}

impl TierDetailsViewModel {
    pub fn new(initial: Option<PriceTierDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            errors: RwSignal::new(PriceTierErrors::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        match validate_price_tier(&current) {
            Ok(()) => self.errors.set(PriceTierErrors::default()),
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        }

        let error = self.error;
        spawn_local(async move {
            let result = if current.id.is_some() {
                api::update_price_tier(&current).await
            } else {
                api::create_price_tier(&current).await
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
