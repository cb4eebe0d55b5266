//! Basic tests for recase-api

use recase_api::*;

#[test]
fn test_case_dispatch() {
    assert_eq!(Case::Camel.apply("hello world"), "helloWorld");
    assert_eq!(Case::Pascal.apply("hello world"), "HelloWorld");
    assert_eq!(Case::Kebab.apply("hello world"), "hello-world");
    assert_eq!(Case::Snake.apply("hello world"), "hello_world");
    assert_eq!(Case::Title.apply("hello world"), "Hello World");
    assert_eq!(Case::Sentence.apply("hello. world"), "Hello. World");
}

#[test]
fn test_config_builder() {
    let config = ChunkConfig::builder()
        .number_of_chunks(3)
        .index_chunk_length(2)
        .raw_output(true)
        .build()
        .unwrap();

    assert_eq!(config.number_of_chunks, Some(3));
    assert_eq!(config.index_chunk_length, Some(2));
    assert!(config.raw_output);
}

#[test]
fn test_config_rejects_zero_chunk_length() {
    let result = ChunkConfig::builder().chunk_length(0).build();
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn test_chunk_raw_output() {
    let config = ChunkConfig::builder()
        .number_of_chunks(3)
        .raw_output(true)
        .build()
        .unwrap();
    let output = chunk("hello world", &config).unwrap();
    assert_eq!(output.pieces(), Some(&["hel".to_string(), "lo ".to_string(), "world".to_string()][..]));
}

#[test]
fn test_chunk_by_length() {
    let config = ChunkConfig::by_length(3);
    let output = chunk("hello world", &config).unwrap();
    assert_eq!(output.joined(), Some("hel lo  wor ld"));
}

#[test]
fn test_chunk_with_index_chunk() {
    let config = ChunkConfig::builder()
        .number_of_chunks(3)
        .index_chunk_length(2)
        .raw_output(true)
        .build()
        .unwrap();
    let output = chunk("hello world", &config).unwrap();
    assert_eq!(
        output.pieces(),
        Some(&["he".to_string(), "llo ".to_string(), "world".to_string()][..])
    );
}

#[test]
fn test_chunk_lengths_surface() {
    let output = chunk_lengths("hello world", &ChunkConfig::by_count(3)).unwrap();
    assert_eq!(output.lengths(), Some(&[3, 3, 5][..]));

    let output = chunk_lengths("hello world", &ChunkConfig::by_length(4)).unwrap();
    assert_eq!(output.lengths(), Some(&[4, 4, 3][..]));
}

#[test]
fn test_count_zero_falls_through_to_length() {
    // A zero count is unset, so the length branch applies
    let config = ChunkConfig {
        number_of_chunks: Some(0),
        chunk_length: Some(5),
        ..ChunkConfig::default()
    };
    let output = chunk("hello world", &config).unwrap();
    assert_eq!(output.joined(), Some("hello  worl d"));
}

#[test]
fn test_transformer_chunking() {
    let transformer = Transformer::new();
    let output = transformer
        .chunk("hello world", &ChunkConfig::by_count(2))
        .unwrap();
    assert_eq!(output.joined(), Some("hello  world"));
}

#[test]
fn test_extension_trait_predicates() {
    assert!("HELLO".is_upper_case());
    assert!("hello".is_lower_case());
    assert!("Hello World".is_title_case());
    assert!(!"hello World".is_title_case());
}

#[test]
fn test_extension_trait_edits() {
    assert_eq!(
        "hello world".replace_at(6, Replacement::Text("Earth"), None),
        "hello Earth"
    );
    assert_eq!("hello".insert_at(2, "world"), "heworldllo");
    assert_eq!("   a\n   b".trim_indent(), "a\nb");
}

#[test]
fn test_error_conversion() {
    let core_error = CoreError::InvalidChunkLength { length: 0 };
    let api_error: ApiError = core_error.into();
    assert!(matches!(api_error, ApiError::Core(_)));
}

#[test]
#[cfg(feature = "serde")]
fn test_case_serialization() {
    let json = serde_json::to_string(&Case::Kebab).unwrap();
    assert_eq!(json, "\"kebab\"");
    let case: Case = serde_json::from_str("\"camel\"").unwrap();
    assert_eq!(case, Case::Camel);
}

#[test]
#[cfg(feature = "serde")]
fn test_chunk_output_serialization() {
    let output = ChunkOutput::Pieces(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&output).unwrap();
    let deserialized: ChunkOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(output, deserialized);
}
