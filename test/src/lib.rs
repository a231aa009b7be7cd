//! Test helpers for driving whole lifewar sessions in-process: an
//! in-memory message transport and a scripted, never-blocking frontend.

pub mod helpers;
