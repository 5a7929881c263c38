pub mod preorder;
pub mod spin_wheel;
