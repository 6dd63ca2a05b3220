mod manager;
mod persistence;

pub use manager::{parse_manual_amount, parse_product_quantity, EventStateManager};
pub use persistence::{
    load_catalog, load_event_state, load_or_empty, load_recipes, load_stock, save_event_state,
    save_reorder,
};
