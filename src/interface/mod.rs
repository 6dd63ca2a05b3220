pub mod prompts;
pub mod render;

pub use prompts::{
    collect_selection, match_product, prompt_manual_entry, prompt_product, prompt_product_quantity,
    prompt_yes_no, ProductMatch,
};
pub use render::{
    display_event, display_ingredient_names, display_reorder, display_shopping_list, format_amount,
    format_write,
};
