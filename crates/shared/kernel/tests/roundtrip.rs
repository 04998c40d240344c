use annc_kernel::prelude::*;
use proptest::prelude::*;

fn programme_strategy() -> impl Strategy<Value = Programme> {
    proptest::collection::vec(any::<String>(), 9).prop_map(|columns| {
        let mut programme = Programme::default();
        for (field, text) in <ProgrammeField as strum::IntoEnumIterator>::iter().zip(columns) {
            *programme.get_mut(field) = text;
        }
        programme
    })
}

fn pack_strategy() -> impl Strategy<Value = Pack> {
    (any::<String>(), proptest::collection::vec(any::<String>(), 0..8))
        .prop_map(|(name, files)| Pack { name, files })
}

proptest! {
    #[test]
    fn programme_roundtrips_through_every_codec(programme in programme_strategy()) {
        for codec in [Codec::Json, Codec::Postcard] {
            let bytes = codec.encode(&programme).unwrap();
            let back: Programme = codec.decode(&bytes).unwrap();
            prop_assert_eq!(&back, &programme);
        }
    }

    #[test]
    fn pack_roundtrips_through_every_codec(pack in pack_strategy()) {
        for codec in [Codec::Json, Codec::Postcard] {
            let bytes = codec.encode(&pack).unwrap();
            let back: Pack = codec.decode(&bytes).unwrap();
            prop_assert_eq!(&back.name, &pack.name);
            prop_assert_eq!(&back.files, &pack.files);
        }
    }

    #[test]
    fn programme_documents_roundtrip(rows in proptest::collection::vec(programme_strategy(), 0..4)) {
        let document = Document::from(rows);
        for codec in [Codec::Json, Codec::Postcard] {
            let bytes = document.encode(codec).unwrap();
            let back = Document::decode(DocumentKind::Programmes, codec, &bytes).unwrap();
            prop_assert_eq!(&back, &document);
        }
    }

    #[test]
    fn pack_documents_roundtrip(packs in proptest::collection::vec(pack_strategy(), 0..4)) {
        let document = Document::from(packs);
        for codec in [Codec::Json, Codec::Postcard] {
            let bytes = document.encode(codec).unwrap();
            let back = Document::decode(DocumentKind::Packs, codec, &bytes).unwrap();
            prop_assert_eq!(&back, &document);
        }
    }
}

#[test]
fn platform_pack_keeps_order_through_key_value_form() -> Result<(), CodecError> {
    let pack = Pack::new("platform-1-pack", ["approach.mp3", "arrival.mp3"]);
    let bytes = Codec::Json.encode(&pack)?;

    let map: serde_json::Map<String, serde_json::Value> = Codec::Json.decode(&bytes)?;
    assert_eq!(map.len(), 2);
    assert_eq!(map["name"], "platform-1-pack");

    let back: Pack = Codec::Json.decode(&bytes)?;
    assert_eq!(back.files, ["approach.mp3", "arrival.mp3"]);
    assert_eq!(back.name, "platform-1-pack");
    Ok(())
}
