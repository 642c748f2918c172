pub mod publishing;
