// Distance calculation utilities

use geo::{EuclideanDistance, Point};

use crate::models::{Cell, Distance, Location};

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Location, p2: &Location) -> Distance {
    let a: Point<f64> = (*p1).into();
    let b: Point<f64> = (*p2).into();
    a.euclidean_distance(&b)
}

/// Calculate the Euclidean distance between the coordinates of two cells
pub fn cell_distance(a: &Cell, b: &Cell) -> Distance {
    euclidean_distance(&a.location, &b.location)
}
