use crate::matrix::Matrix;

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for Matrix<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            size: usize,
            data: Vec<T>,
        }

        let MatrixData { size, data } = MatrixData::deserialize(deserializer)?;

        Matrix::from_shape_vec(size, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(serialized, r#"{"size":2,"data":[1.0,2.0,3.0,4.0]}"#);
        let deserialized: Matrix<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_invalid_shape() {
        let res: Result<Matrix<f64>, _> = serde_json::from_str(r#"{"size":2,"data":[1.0]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serde_size_overflow() {
        let res: Result<Matrix<f64>, _> =
            serde_json::from_str(r#"{"size":18446744073709551615,"data":[]}"#);
        assert!(res.is_err());

        let res: Result<Matrix<f64>, _> = serde_json::from_str(r#"{"size":4294967296,"data":[]}"#);
        assert!(res.is_err());
    }
}
