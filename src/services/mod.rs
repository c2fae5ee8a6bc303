pub mod infopoint;
