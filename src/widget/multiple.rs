use indexmap::IndexMap;
use std::rc::Rc;

use super::FilterWidget;
use crate::filter::{FilterExpr, Op};
use crate::ui::{ChoiceGroup, ChoiceInput, Container, FieldGroup, GroupEntry};

pub struct MultiSelectWidget {
    name: String,
    legend: String,
    options: Vec<(String, Rc<ChoiceInput>)>,
}

impl MultiSelectWidget {
    pub fn new(
        name: &str,
        legend: &str,
        exclusive: bool,
        options: &IndexMap<String, String>,
    ) -> Self {
        let group = ChoiceGroup::new(exclusive);
        let options = options
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let input = ChoiceInput::new(name, format!("{name}{i}"), value, &group);
                (label.clone(), input)
            })
            .collect();

        Self {
            name: name.to_string(),
            legend: legend.to_string(),
            options,
        }
    }

    pub fn options(&self) -> &[(String, Rc<ChoiceInput>)] {
        &self.options
    }
}

impl FilterWidget for MultiSelectWidget {
    fn field(&self) -> &str {
        &self.name
    }

    fn render(&self, container: &Container) {
        container.append(FieldGroup {
            legend: self.legend.clone(),
            entries: self
                .options
                .iter()
                .map(|(label, input)| GroupEntry::Choice {
                    label: label.clone(),
                    input: Rc::clone(input),
                })
                .collect(),
        });
    }

    fn update(&self, exprs: &[FilterExpr]) {
        let Some(expr) = exprs.iter().find(|e| e.op == Op::In) else {
            return;
        };

        let selected: Vec<&str> = expr.value.split('|').collect();
        for (_, input) in &self.options {
            if selected.contains(&input.value.as_str()) {
                input.set_checked(true);
            }
        }
    }

    fn extract(&self) -> Option<Vec<FilterExpr>> {
        let values: Vec<&str> = self
            .options
            .iter()
            .filter(|(_, input)| input.checked())
            .map(|(_, input)| input.value.as_str())
            .collect();

        if values.is_empty() {
            return None;
        }

        Some(vec![FilterExpr::new(Op::In, values.join("|"))])
    }
}
