#![allow(unused_imports)]

pub(crate) use anyhow::{anyhow, bail, ensure, Context};
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use std::ffi::OsStr;
pub(crate) use std::fmt;
pub(crate) use std::fs::File;
pub(crate) use std::path::{Path, PathBuf};
pub(crate) use uom::ConstZero;

pub(crate) use crate::error::{ConsistError, ConsistResult};
pub(crate) use crate::si;
pub(crate) use crate::traits::*;
pub(crate) use crate::uc;
pub(crate) use crate::utils;
pub(crate) use crate::utils::{almost_eq, almost_gt, almost_lt};
