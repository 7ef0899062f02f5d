/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::{EdgeError, ImageChannels, MismatchedSize};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: T) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Immutable image store
pub struct EdgeImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
    pub channels: ImageChannels,
}

/// Mutable image store
/// If it owns a vector it does auto resizing on methods that work out-of-place.
pub struct EdgeImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
    pub channels: ImageChannels,
}

impl<T: Clone + Copy + Default + Debug> Default for EdgeImageMut<'_, T> {
    fn default() -> Self {
        EdgeImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            stride: 0,
            channels: ImageChannels::Plane,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> EdgeImage<'a, T> {
    /// Allocates default image layout for given [ImageChannels]
    pub fn alloc(width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![
                T::default();
                width as usize
                    * height as usize
                    * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data
    /// Stride will be default `width * channels.channels()`
    pub fn borrow(arr: &'a [T], width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), EdgeError> {
        if self.width == 0 || self.height == 0 {
            return Err(EdgeError::ZeroBaseSize);
        }
        let cn = self.channels.channels();
        if self.data.len()
            < self.stride as usize * (self.height as usize - 1) + self.width as usize * cn
        {
            return Err(EdgeError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: self.stride as usize * self.height as usize,
                received: self.data.len(),
            }));
        }
        if (self.stride as usize) < (self.width as usize * cn) {
            return Err(EdgeError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: self.width as usize * cn,
                received: self.stride as usize,
            }));
        }
        Ok(())
    }

    /// Checks if it matches the size of the other image, channels included
    #[inline]
    pub fn size_matches_mut(&self, other: &EdgeImageMut<'_, T>) -> Result<(), EdgeError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(EdgeError::ImagesMustMatch)
    }

    /// Checks if it matches the size of the other image, channels ignored
    #[inline]
    pub fn only_size_matches_mut(&self, other: &EdgeImageMut<'_, T>) -> Result<(), EdgeError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(EdgeError::ImagesMustMatch)
    }
}

impl<'a, T: Clone + Copy + Default + Debug> EdgeImageMut<'a, T> {
    /// Allocates default image layout for given [ImageChannels]
    pub fn alloc(width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: BufferStore::Owned(vec![
                T::default();
                width as usize * height as usize * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Mutably borrows existing data
    /// Stride will be default `width * channels.channels()`
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements
    ///
    /// When a reference image is provided an owned store is resized to match it
    /// before checking, so freshly [Default]ed destinations are always valid.
    #[inline]
    pub fn check_layout(&mut self, other: Option<&EdgeImage<'_, T>>) -> Result<(), EdgeError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize(other.width, other.height, other.channels);
                return Ok(());
            }
        }
        if self.width == 0 || self.height == 0 {
            return Err(EdgeError::ZeroBaseSize);
        }
        let cn = self.channels.channels();
        let data_len = self.data.borrow().len();
        if data_len < self.stride as usize * (self.height as usize - 1) + self.width as usize * cn {
            return Err(EdgeError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: self.stride as usize * self.height as usize,
                received: data_len,
            }));
        }
        if (self.stride as usize) < (self.width as usize * cn) {
            return Err(EdgeError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: self.width as usize * cn,
                received: self.stride as usize,
            }));
        }
        Ok(())
    }

    /// Checks if layout matches necessary requirements by using external channels count
    #[inline]
    pub fn check_layout_channels(
        &mut self,
        cn: usize,
        other: Option<&EdgeImage<'_, T>>,
    ) -> Result<(), EdgeError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize_arbitrary(other.width, other.height, cn);
                return Ok(());
            }
        }
        if self.width == 0 || self.height == 0 {
            return Err(EdgeError::ZeroBaseSize);
        }
        let data_len = self.data.borrow().len();
        if data_len < self.stride as usize * (self.height as usize - 1) + self.width as usize * cn {
            return Err(EdgeError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: self.stride as usize * self.height as usize,
                received: data_len,
            }));
        }
        if (self.stride as usize) < (self.width as usize * cn) {
            return Err(EdgeError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: self.width as usize * cn,
                received: self.stride as usize,
            }));
        }
        Ok(())
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> EdgeImage<'_, T> {
        EdgeImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            stride: self.row_stride(),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn resize(&mut self, width: u32, height: u32, channels: ImageChannels) {
        self.height = height;
        self.width = width;
        self.channels = channels;
        self.stride = self.width * self.channels.channels() as u32;
        self.data.resize(
            self.row_stride() as usize * self.height as usize,
            T::default(),
        );
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn resize_arbitrary(&mut self, width: u32, height: u32, cn: usize) {
        self.height = height;
        self.width = width;
        self.channels = ImageChannels::from(cn);
        self.stride = self.width * cn as u32;
        self.data.resize(
            self.row_stride() as usize * self.height as usize,
            T::default(),
        );
    }
}
