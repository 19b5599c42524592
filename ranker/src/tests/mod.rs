#[cfg(test)]
mod test_edit;
