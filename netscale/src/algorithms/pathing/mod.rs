pub mod hop_distance;
