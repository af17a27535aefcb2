use crate::model::item::InputItem;

pub trait InputContext {
    fn input_items(&self) -> &[InputItem];
}
