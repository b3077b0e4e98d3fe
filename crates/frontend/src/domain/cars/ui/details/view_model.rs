use crate::domain::attributes::store;
use crate::domain::cars::api;
use contracts::domain::attribute::{
    models_for_brand, option_label, sort_options_asc, sort_options_desc, AttributeCatalog,
    AttributeGroup, AttributeOption, Language,
};
use contracts::domain::car::{validate_car, CarDto, CarErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the car details form
#[derive(Clone, Copy)]
pub struct CarDetailsViewModel {
    pub form: RwSignal<CarDto>,
    pub errors: RwSignal<CarErrors>,
    pub error: RwSignal<Option<String>>,
    pub catalog: RwSignal<Option<AttributeCatalog>>,
}

impl CarDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CarDto::default()),
            errors: RwSignal::new(CarErrors::default()),
            error: RwSignal::new(None),
            catalog: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    /// Fetch the attribute catalog (served from the TTL cache after the
    /// first call)
    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        let error = self.error;
        spawn_local(async move {
            match store::load_catalog().await {
                Ok(c) => catalog.set(Some(c)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<i64>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            spawn_local(async move {
                match api::fetch_car(existing_id).await {
                    Ok(car) => {
                        form.set(CarDto {
                            id: Some(car.id),
                            plate_number: car.plate_number,
                            brand_id: Some(car.brand_id),
                            model_id: Some(car.model_id),
                            year_id: Some(car.year_id),
                            color_id: car.color_id,
                            transmission_id: car.transmission_id,
                            body_type_id: car.body_type_id,
                            daily_price: car.daily_price,
                        });
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    }

    /// Selecting a brand invalidates the model choice
    pub fn set_brand(&self, brand_id: Option<i64>) {
        self.form.update(|f| {
            f.brand_id = brand_id;
            f.model_id = None;
        });
    }

    /// (value, label) pairs for the brand select, sorted ascending
    pub fn brand_options(&self, lang: Language) -> Vec<(String, String)> {
        self.group_options(lang, AttributeGroup::Brand, false)
    }

    /// Models of the selected brand only
    pub fn model_options(&self, lang: Language) -> Vec<(String, String)> {
        let brand_id = self.form.get().brand_id;
        let Some(catalog) = self.catalog.get() else {
            return Vec::new();
        };
        let mut models = models_for_brand(catalog.group(AttributeGroup::Model), brand_id);
        sort_options_asc(&mut models, lang);
        to_pairs(&models, lang)
    }

    pub fn color_options(&self, lang: Language) -> Vec<(String, String)> {
        self.group_options(lang, AttributeGroup::Color, false)
    }

    pub fn transmission_options(&self, lang: Language) -> Vec<(String, String)> {
        self.group_options(lang, AttributeGroup::Transmission, false)
    }

    pub fn body_type_options(&self, lang: Language) -> Vec<(String, String)> {
        self.group_options(lang, AttributeGroup::BodyType, false)
    }

    /// Years sort descending with "Before 1980" pinned last
    pub fn year_options(&self, lang: Language) -> Vec<(String, String)> {
        self.group_options(lang, AttributeGroup::Year, true)
    }

    fn group_options(
        &self,
        lang: Language,
        group: AttributeGroup,
        descending: bool,
    ) -> Vec<(String, String)> {
        let Some(catalog) = self.catalog.get() else {
            return Vec::new();
        };
        let mut options = catalog.group(group).to_vec();
        if descending {
            sort_options_desc(&mut options, lang);
        } else {
            sort_options_asc(&mut options, lang);
        }
        to_pairs(&options, lang)
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        match validate_car(&current) {
            Ok(()) => self.errors.set(CarErrors::default()),
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        }

        let error = self.error;
        spawn_local(async move {
            let result = if current.id.is_some() {
                api::update_car(&current).await
            } else {
                api::create_car(&current).await
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

fn to_pairs(options: &[AttributeOption], lang: Language) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.id.to_string(), option_label(o, lang).to_string()))
        .collect()
}
