pub(crate) mod shot;
