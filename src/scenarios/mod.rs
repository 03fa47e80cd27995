pub mod lorentz;
pub mod projectile;
pub mod scattering;
