use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

#[derive(Default)]
pub struct Container {
    groups: RefCell<Vec<FieldGroup>>,
}

impl Container {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn append(&self, group: FieldGroup) {
        self.groups.borrow_mut().push(group);
    }

    pub fn groups(&self) -> Ref<'_, Vec<FieldGroup>> {
        self.groups.borrow()
    }
}

pub struct FieldGroup {
    pub legend: String,
    pub entries: Vec<GroupEntry>,
}

pub enum GroupEntry {
    Number(Rc<NumberInput>),
    Choice { label: String, input: Rc<ChoiceInput> },
}

pub struct NumberInput {
    pub name: String,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    value: RefCell<String>,
}

impl NumberInput {
    pub fn new(name: impl Into<String>, min: i64, max: i64, step: i64, initial: i64) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            min,
            max,
            step,
            value: RefCell::new(initial.to_string()),
        })
    }

    pub fn set_value(&self, raw: impl Into<String>) {
        *self.value.borrow_mut() = raw.into();
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

pub struct ChoiceGroup {
    exclusive: bool,
    members: RefCell<Vec<Weak<ChoiceInput>>>,
}

impl ChoiceGroup {
    pub fn new(exclusive: bool) -> Rc<Self> {
        Rc::new(Self {
            exclusive,
            members: RefCell::new(Vec::new()),
        })
    }

    pub fn exclusive(&self) -> bool {
        self.exclusive
    }

    fn clear(&self) {
        for member in self.members.borrow().iter() {
            if let Some(input) = member.upgrade() {
                input.checked.set(false);
            }
        }
    }
}

pub struct ChoiceInput {
    pub name: String,
    pub id: String,
    pub value: String,
    checked: Cell<bool>,
    group: Rc<ChoiceGroup>,
}

impl ChoiceInput {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        value: impl Into<String>,
        group: &Rc<ChoiceGroup>,
    ) -> Rc<Self> {
        let input = Rc::new(Self {
            name: name.into(),
            id: id.into(),
            value: value.into(),
            checked: Cell::new(false),
            group: Rc::clone(group),
        });
        group.members.borrow_mut().push(Rc::downgrade(&input));
        input
    }

    // Checking a member of an exclusive group unchecks its siblings.
    pub fn set_checked(&self, on: bool) {
        if on && self.group.exclusive() {
            self.group.clear();
        }
        self.checked.set(on);
    }

    pub fn checked(&self) -> bool {
        self.checked.get()
    }

    pub fn exclusive(&self) -> bool {
        self.group.exclusive()
    }
}
