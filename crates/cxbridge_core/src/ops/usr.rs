//! Objective-C USR construction.
//!
//! # Invariants
//! - Every name argument is copied into a NUL-terminated buffer that lives
//!   until the native call returns, and no longer.
//! - A class USR passed as input is lent to libclang, never disposed.
//! - The returned native string is released before the operation returns.
//! - An argument with an interior NUL fails before any native call is made.

use crate::error::CxResult;
use crate::library::Libclang;
use crate::model::usr::Usr;
use crate::native::{to_c_string, BorrowedCxString, CXString, CxString};
use std::ffi::c_uint;

impl Libclang {
    /// USR for an Objective-C class.
    pub fn construct_usr_objc_class(&self, class_name: &str) -> CxResult<Usr> {
        let class_name = to_c_string("class_name", class_name)?;
        // SAFETY: the buffer outlives the call; the result is owned by the guard.
        let raw = unsafe { (self.api.construct_usr_objc_class)(class_name.as_ptr()) };
        Ok(self.take_usr(raw))
    }

    /// USR for an Objective-C category of `class_name`.
    pub fn construct_usr_objc_category(
        &self,
        class_name: &str,
        category_name: &str,
    ) -> CxResult<Usr> {
        let class_name = to_c_string("class_name", class_name)?;
        let category_name = to_c_string("category_name", category_name)?;
        // SAFETY: both buffers outlive the call; the result is owned by the guard.
        let raw = unsafe {
            (self.api.construct_usr_objc_category)(class_name.as_ptr(), category_name.as_ptr())
        };
        Ok(self.take_usr(raw))
    }

    /// USR for an Objective-C protocol.
    pub fn construct_usr_objc_protocol(&self, protocol_name: &str) -> CxResult<Usr> {
        let protocol_name = to_c_string("protocol_name", protocol_name)?;
        // SAFETY: the buffer outlives the call; the result is owned by the guard.
        let raw = unsafe { (self.api.construct_usr_objc_protocol)(protocol_name.as_ptr()) };
        Ok(self.take_usr(raw))
    }

    /// USR for an instance variable of the class identified by `class_usr`.
    pub fn construct_usr_objc_ivar(&self, name: &str, class_usr: &Usr) -> CxResult<Usr> {
        let name = to_c_string("name", name)?;
        let class_usr = to_c_string("class_usr", class_usr.as_str())?;
        let borrowed = BorrowedCxString::new(&class_usr);
        // SAFETY: both buffers outlive the call; the class USR is unmanaged
        // and libclang only reads it.
        let raw = unsafe { (self.api.construct_usr_objc_ivar)(name.as_ptr(), borrowed.as_raw()) };
        Ok(self.take_usr(raw))
    }

    /// USR for a method of the class identified by `class_usr`.
    ///
    /// `is_instance_method` selects between `-` (instance) and `+` (class)
    /// methods.
    pub fn construct_usr_objc_method(
        &self,
        name: &str,
        is_instance_method: bool,
        class_usr: &Usr,
    ) -> CxResult<Usr> {
        let name = to_c_string("name", name)?;
        let class_usr = to_c_string("class_usr", class_usr.as_str())?;
        let borrowed = BorrowedCxString::new(&class_usr);
        // SAFETY: both buffers outlive the call; the class USR is unmanaged
        // and libclang only reads it.
        let raw = unsafe {
            (self.api.construct_usr_objc_method)(
                name.as_ptr(),
                c_uint::from(is_instance_method),
                borrowed.as_raw(),
            )
        };
        Ok(self.take_usr(raw))
    }

    /// USR for a property of the class identified by `class_usr`.
    pub fn construct_usr_objc_property(&self, property: &str, class_usr: &Usr) -> CxResult<Usr> {
        let property = to_c_string("property", property)?;
        let class_usr = to_c_string("class_usr", class_usr.as_str())?;
        let borrowed = BorrowedCxString::new(&class_usr);
        // SAFETY: both buffers outlive the call; the class USR is unmanaged
        // and libclang only reads it.
        let raw =
            unsafe { (self.api.construct_usr_objc_property)(property.as_ptr(), borrowed.as_raw()) };
        Ok(self.take_usr(raw))
    }

    fn take_usr(&self, raw: CXString) -> Usr {
        Usr::new(CxString::new(raw, &self.api).into_string())
    }
}
