pub mod buildings;
