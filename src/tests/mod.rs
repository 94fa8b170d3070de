//! Test modules for the plant monitor binary.
