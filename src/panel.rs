use crate::filter::{self, FilterMap};
use crate::schema::Schema;
use crate::ui::Container;
use crate::widget::{self, FilterWidget};

pub struct FilterPanel {
    widgets: Vec<Box<dyn FilterWidget>>,
    extra_params: Vec<String>,
    filters_active: bool,
}

impl FilterPanel {
    // Widgets are built, rendered, and seeded in schema declaration order,
    // all before the panel is handed back to the host.
    pub fn new(schema: &Schema, container: &Container, query: &str) -> Self {
        let widgets: Vec<Box<dyn FilterWidget>> = schema
            .iter()
            .map(|(name, spec)| widget::build(name, spec))
            .collect();

        for w in &widgets {
            w.render(container);
        }

        let (filters, extra_params) = filter::decode(query);
        let filters_active = !filters.is_empty();

        if filters_active {
            for w in &widgets {
                let exprs = filters.get(w.field()).map_or(&[][..], Vec::as_slice);
                w.update(exprs);
            }
        }

        Self {
            widgets,
            extra_params,
            filters_active,
        }
    }

    pub fn filters_active(&self) -> bool {
        self.filters_active
    }

    pub fn extra_params(&self) -> &[String] {
        &self.extra_params
    }

    // Collects every widget's current state into a fresh query string. Extra
    // parameters from the decoded location are not carried over; hosts that
    // want them use extra_params().
    pub fn submit(&self) -> String {
        let mut filters = FilterMap::new();

        for w in &self.widgets {
            if let Some(exprs) = w.extract() {
                filters.insert(w.field().to_string(), exprs);
            }
        }

        filter::encode(&filters, &[])
    }
}
