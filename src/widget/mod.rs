pub mod multiple;
pub mod range;

pub use multiple::MultiSelectWidget;
pub use range::RangeWidget;

use crate::filter::FilterExpr;
use crate::schema::{FieldKind, FieldSpec};
use crate::ui::Container;

pub trait FilterWidget {
    fn field(&self) -> &str;
    fn render(&self, container: &Container);
    fn update(&self, exprs: &[FilterExpr]);
    fn extract(&self) -> Option<Vec<FilterExpr>>;
}

pub fn build(name: &str, spec: &FieldSpec) -> Box<dyn FilterWidget> {
    match &spec.kind {
        FieldKind::Range { min, max, step } => {
            Box::new(RangeWidget::new(name, &spec.legend, *min, *max, *step))
        }
        FieldKind::Multiple { exclusive, options } => Box::new(MultiSelectWidget::new(
            name,
            &spec.legend,
            *exclusive,
            options,
        )),
    }
}
