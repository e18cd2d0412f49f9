mod layers;
mod pointers;
