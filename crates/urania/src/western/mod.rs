pub mod angles;
pub mod decans;
pub mod houses;
pub mod rulers;

pub use angles::{compute_angles, is_polar, ChartAngles, OBLIQUITY_DEG};
pub use decans::{
    get_decan_index, get_decan_info_for_sign_and_degree, get_decan_info_from_longitude, DecanInfo,
    Element,
};
pub use houses::{house_of, whole_sign_houses, HouseRecord};
pub use rulers::{get_sign_ruler, get_sign_ruler_from_longitude};
