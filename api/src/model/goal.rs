use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddItemForm {
    pub text: String,
}
