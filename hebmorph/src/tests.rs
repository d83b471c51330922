//! Cross-component tests for the loader and the lemmatization engine.

mod loading_tests;
