pub mod blessing;
