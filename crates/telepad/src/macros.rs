#[macro_export]
macro_rules! impl_unit_newtype {
    ($name:ty) => {
        impl $name {
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> f64 {
                self.0
            }
        }
    };
}
