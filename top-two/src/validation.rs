use crate::Error;

pub(crate) fn validate(values: &[i32]) -> Result<(), Error> {
    // Every strategy reads two positions
    if values.len() < 2 {
        return Err(Error::InvalidArgument { len: values.len() });
    }
    Ok(())
}

/// Position of the first occurrence of the maximum.
pub(crate) fn first_max_index(values: &[i32]) -> Result<usize, Error> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .map(|(i, _)| i)
        .ok_or(Error::InvalidArgument { len: values.len() })
}
