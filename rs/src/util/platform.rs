// rs/src/util/platform.rs
use std::collections::HashMap;

#[cfg(unix)]
use std::ffi::CStr;
#[cfg(unix)]
use std::ptr;

/// Per-scan cache of uid/gid to account names.
#[derive(Default, Debug)]
pub struct NameCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&mut self, uid: u32) -> &str {
        self.users
            .entry(uid)
            .or_insert_with(|| get_username_from_uid(uid))
    }

    pub fn group(&mut self, gid: u32) -> &str {
        self.groups
            .entry(gid)
            .or_insert_with(|| get_groupname_from_gid(gid))
    }
}

#[cfg(unix)]
const NAME_BUF_START: usize = 1024;
#[cfg(unix)]
const NAME_BUF_MAX: usize = 1 << 20;

/// Account name for `uid`, or the numeric id when it has no passwd entry.
#[cfg(unix)]
pub fn get_username_from_uid(uid: u32) -> String {
    let mut buf: Vec<libc::c_char> = vec![0; NAME_BUF_START];
    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = ptr::null_mut();
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };
        if rc == libc::ERANGE && buf.len() < NAME_BUF_MAX {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            tracing::debug!(uid, rc, "no passwd entry");
            return uid.to_string();
        }
        return unsafe { cstr_or(pwd.pw_name, uid) };
    }
}

/// Group name for `gid`, or the numeric id when it has no group entry.
#[cfg(unix)]
pub fn get_groupname_from_gid(gid: u32) -> String {
    let mut buf: Vec<libc::c_char> = vec![0; NAME_BUF_START];
    loop {
        let mut grp: libc::group = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::group = ptr::null_mut();
        let rc = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result)
        };
        if rc == libc::ERANGE && buf.len() < NAME_BUF_MAX {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            tracing::debug!(gid, rc, "no group entry");
            return gid.to_string();
        }
        return unsafe { cstr_or(grp.gr_name, gid) };
    }
}

#[cfg(unix)]
unsafe fn cstr_or(name_ptr: *const libc::c_char, id: u32) -> String {
    if name_ptr.is_null() {
        return id.to_string();
    }
    match unsafe { CStr::from_ptr(name_ptr) }.to_str() {
        Ok(name) if !name.is_empty() => name.to_string(),
        _ => id.to_string(),
    }
}

#[cfg(not(unix))]
pub fn get_username_from_uid(uid: u32) -> String {
    uid.to_string()
}

#[cfg(not(unix))]
pub fn get_groupname_from_gid(gid: u32) -> String {
    gid.to_string()
}
