use std::rc::Rc;

use super::FilterWidget;
use crate::filter::{FilterExpr, Op};
use crate::ui::{Container, FieldGroup, GroupEntry, NumberInput};

pub struct RangeWidget {
    name: String,
    legend: String,
    min: i64,
    max: i64,
    from: Rc<NumberInput>,
    to: Rc<NumberInput>,
}

impl RangeWidget {
    pub fn new(name: &str, legend: &str, min: i64, max: i64, step: i64) -> Self {
        let from = NumberInput::new(format!("{name}__from"), min, max, step, min);
        let to = NumberInput::new(format!("{name}__to"), min, max, step, max);

        Self {
            name: name.to_string(),
            legend: legend.to_string(),
            min,
            max,
            from,
            to,
        }
    }

    pub fn from_input(&self) -> &Rc<NumberInput> {
        &self.from
    }

    pub fn to_input(&self) -> &Rc<NumberInput> {
        &self.to
    }

    fn bounded_int(&self, raw: &str, fallback: i64) -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(v) => v.clamp(self.min, self.max),
            Err(_) => fallback,
        }
    }
}

impl FilterWidget for RangeWidget {
    fn field(&self) -> &str {
        &self.name
    }

    fn render(&self, container: &Container) {
        container.append(FieldGroup {
            legend: self.legend.clone(),
            entries: vec![
                GroupEntry::Number(Rc::clone(&self.from)),
                GroupEntry::Number(Rc::clone(&self.to)),
            ],
        });
    }

    fn update(&self, exprs: &[FilterExpr]) {
        let v_from = exprs
            .iter()
            .find(|e| e.op == Op::Gte)
            .map_or(self.min, |e| self.bounded_int(&e.value, self.min));
        let v_to = exprs
            .iter()
            .find(|e| e.op == Op::Lte)
            .map_or(self.max, |e| self.bounded_int(&e.value, self.max));

        self.from.set_value(v_from.to_string());
        self.to.set_value(v_to.to_string());
    }

    fn extract(&self) -> Option<Vec<FilterExpr>> {
        let v_from = self.bounded_int(&self.from.value(), self.min);
        let v_to = self.bounded_int(&self.to.value(), self.max);

        if v_from == self.min && v_to == self.max {
            return None;
        }

        Some(vec![
            FilterExpr::new(Op::Gte, v_from.to_string()),
            FilterExpr::new(Op::Lte, v_to.to_string()),
        ])
    }
}
