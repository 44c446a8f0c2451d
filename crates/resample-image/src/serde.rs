use crate::{Image, ImageSize};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for Image<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Image", 2)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Image<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ImageData<T> {
            size: ImageSize,
            data: Vec<T>,
        }

        let ImageData { size, data } = ImageData::deserialize(deserializer)?;

        Image::new(size, data).map_err(serde::de::Error::custom)
    }
}
